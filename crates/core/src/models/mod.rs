/// Push-channel message shapes
pub mod push;
/// Reservation records and requests
pub mod reservation;
/// Parking spot records and status/category enums
pub mod spot;
