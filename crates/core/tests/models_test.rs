use chrono::{DateTime, TimeZone, Utc};
use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::json;
use parkview_core::models::push::PushUpdate;
use parkview_core::models::reservation::{
    CreateReservationRequest, Reservation, SpotRef, TimeStatus, UserRef,
};
use parkview_core::models::spot::{ApiSpot, SpotCategory, SpotRecord, SpotStatus};

fn at(hour: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 9, 7, hour, 0, 0).unwrap()
}

fn reservation(id: i64, start: DateTime<Utc>, end: DateTime<Utc>) -> Reservation {
    Reservation {
        id,
        user: None,
        parking_spot: SpotRef {
            id: 5,
            label: "A-12".to_string(),
        },
        start_time: start,
        end_time: end,
    }
}

#[test]
fn test_spot_deserializes_from_backend_shape() {
    let spot: ApiSpot = serde_json::from_value(json!({
        "id": 7,
        "label": "B-03",
        "category": "VIP",
        "status": "UNDER_MAINTENANCE",
        "occupied": true
    }))
    .unwrap();

    assert_eq!(spot.id, 7);
    assert_eq!(spot.label, "B-03");
    assert_eq!(spot.category, SpotCategory::Vip);
    assert_eq!(spot.status, SpotStatus::UnderMaintenance);
    assert!(spot.occupied);
}

#[test]
fn test_spot_occupied_flag_defaults_to_false() {
    let spot: ApiSpot = serde_json::from_value(json!({
        "id": 1,
        "label": "A-01",
        "category": "NORMAL",
        "status": "AVAILABLE"
    }))
    .unwrap();

    assert!(!spot.occupied);
}

#[rstest]
#[case(SpotStatus::Available, "AVAILABLE")]
#[case(SpotStatus::Reserved, "RESERVED")]
#[case(SpotStatus::Occupied, "OCCUPIED")]
#[case(SpotStatus::Vip, "VIP")]
#[case(SpotStatus::UnderMaintenance, "UNDER_MAINTENANCE")]
#[case(SpotStatus::PersonalUse, "PERSONAL_USE")]
fn test_spot_status_wire_names(#[case] status: SpotStatus, #[case] wire: &str) {
    assert_eq!(serde_json::to_value(status).unwrap(), json!(wire));
    assert_eq!(
        serde_json::from_value::<SpotStatus>(json!(wire)).unwrap(),
        status
    );
}

#[test]
fn test_reservation_uses_camel_case_keys() {
    let parsed: Reservation = serde_json::from_value(json!({
        "id": 42,
        "user": { "id": 9, "email": "driver@example.com" },
        "parkingSpot": { "id": 5, "label": "A-12" },
        "startTime": "2026-09-07T09:00:00Z",
        "endTime": "2026-09-07T11:00:00Z"
    }))
    .unwrap();

    assert_eq!(
        parsed.user,
        Some(UserRef {
            id: 9,
            email: "driver@example.com".to_string()
        })
    );
    assert_eq!(parsed.parking_spot.label, "A-12");
    assert_eq!(parsed.start_time, at(9));
    assert_eq!(parsed.end_time, at(11));
    assert_eq!(parsed.duration_hours(), 2.0);
}

#[test]
fn test_reservation_user_is_optional_and_not_serialized_when_absent() {
    let parsed: Reservation = serde_json::from_value(json!({
        "id": 42,
        "parkingSpot": { "id": 5, "label": "A-12" },
        "startTime": "2026-09-07T09:00:00Z",
        "endTime": "2026-09-07T11:00:00Z"
    }))
    .unwrap();
    assert_eq!(parsed.user, None);

    let back = serde_json::to_value(&parsed).unwrap();
    assert!(back.get("user").is_none());
}

#[test]
fn test_create_request_serializes_camel_case() {
    let request = CreateReservationRequest {
        parking_spot_id: 5,
        start_time: at(9),
        end_time: at(11),
    };

    let value = serde_json::to_value(&request).unwrap();
    assert_eq!(value["parkingSpotId"], json!(5));
    assert_eq!(value["startTime"], json!("2026-09-07T09:00:00Z"));
    assert_eq!(value["endTime"], json!("2026-09-07T11:00:00Z"));
}

#[test]
fn test_push_update_distinguishes_snapshot_from_single_spot() {
    let snapshot: PushUpdate = serde_json::from_value(json!([
        { "id": 1, "label": "A-01", "category": "NORMAL", "status": "AVAILABLE" },
        { "id": 2, "label": "A-02", "category": "NORMAL", "status": "OCCUPIED" }
    ]))
    .unwrap();
    match snapshot {
        PushUpdate::Snapshot(spots) => assert_eq!(spots.len(), 2),
        PushUpdate::Spot(_) => panic!("array payload should parse as a snapshot"),
    }

    let single: PushUpdate = serde_json::from_value(json!(
        { "id": 2, "label": "A-02", "category": "NORMAL", "status": "OCCUPIED" }
    ))
    .unwrap();
    match single {
        PushUpdate::Spot(spot) => assert_eq!(spot.label, "A-02"),
        PushUpdate::Snapshot(_) => panic!("object payload should parse as a single spot"),
    }
}

#[rstest]
#[case(at(10), at(12), TimeStatus::Upcoming)]
#[case(at(8), at(12), TimeStatus::Active)]
#[case(at(6), at(8), TimeStatus::Past)]
// The boundary instants are exclusive on both ends.
#[case(at(9), at(12), TimeStatus::Active)]
#[case(at(6), at(9), TimeStatus::Past)]
fn test_reservation_time_status(
    #[case] start: DateTime<Utc>,
    #[case] end: DateTime<Utc>,
    #[case] expected: TimeStatus,
) {
    assert_eq!(reservation(1, start, end).time_status(at(9)), expected);
}

#[test]
fn test_effective_status_upgrades_available_with_future_reservation() {
    let mut spot = SpotRecord::from(ApiSpot {
        id: 5,
        label: "A-12".to_string(),
        category: SpotCategory::Normal,
        status: SpotStatus::Available,
        occupied: false,
    });

    // No history at all: stays available.
    assert_eq!(spot.effective_status(at(9)), SpotStatus::Available);

    // Only past reservations: stays available.
    spot.reservations = vec![reservation(1, at(6), at(8))];
    assert_eq!(spot.effective_status(at(9)), SpotStatus::Available);

    // A reservation still ending in the future upgrades the display.
    spot.reservations.push(reservation(2, at(10), at(12)));
    assert_eq!(spot.effective_status(at(9)), SpotStatus::Reserved);
}

#[test]
fn test_effective_status_never_overrides_non_available_base() {
    let mut spot = SpotRecord::from(ApiSpot {
        id: 6,
        label: "M-01".to_string(),
        category: SpotCategory::Normal,
        status: SpotStatus::UnderMaintenance,
        occupied: false,
    });
    spot.reservations = vec![reservation(3, at(10), at(12))];

    assert_eq!(spot.effective_status(at(9)), SpotStatus::UnderMaintenance);
}

#[test]
fn test_reservation_interval_matches_its_times() {
    let r = reservation(4, at(9), at(11));
    let interval = r.interval();

    assert_eq!(interval.start, r.start_time);
    assert_eq!(interval.end, r.end_time);
}
