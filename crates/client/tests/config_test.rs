use tracing::Level;
use parkview_client::config::ClientConfig;

fn config() -> ClientConfig {
    ClientConfig {
        api_url: "http://localhost:8080/api".to_string(),
        ws_url: "ws://localhost:8080/api/ws".to_string(),
        email: None,
        password: None,
        admin: false,
        log_level: Level::INFO,
        request_timeout: 30,
        max_intervals: 3,
        max_reservation_hours: 8.0,
    }
}

#[test]
fn test_picker_limits_come_from_the_config() {
    let mut config = config();
    config.max_intervals = 5;
    config.max_reservation_hours = 12.5;

    let limits = config.picker_limits();
    assert_eq!(limits.max_intervals, 5);
    assert_eq!(limits.max_hours, 12.5);
}

#[test]
fn test_default_ws_url_swaps_scheme_and_appends_path() {
    assert_eq!(
        ClientConfig::default_ws_url("http://localhost:8080/api"),
        "ws://localhost:8080/api/ws"
    );
    assert_eq!(
        ClientConfig::default_ws_url("https://parking.example.com/api"),
        "wss://parking.example.com/api/ws"
    );
}

#[test]
fn test_default_ws_url_trims_trailing_slash() {
    assert_eq!(
        ClientConfig::default_ws_url("http://localhost:8080/api/"),
        "ws://localhost:8080/api/ws"
    );
}

#[test]
fn test_default_ws_url_passes_through_unknown_schemes() {
    assert_eq!(
        ClientConfig::default_ws_url("ws://localhost:8080/api"),
        "ws://localhost:8080/api/ws"
    );
}
