use std::collections::HashMap;

use async_trait::async_trait;
use mockall::mock;

use parkview_core::errors::ParkResult;
use parkview_core::models::reservation::{CreateReservationRequest, Reservation};
use parkview_core::models::spot::ApiSpot;

use crate::api::ParkingApi;

// Mock API client for session tests.
mock! {
    pub ParkingApi {}

    #[async_trait]
    impl ParkingApi for ParkingApi {
        async fn list_spots(&self) -> ParkResult<Vec<ApiSpot>>;

        async fn spot_history(&self, spot_id: i64) -> ParkResult<Vec<Reservation>>;

        async fn multi_spot_reservations(
            &self,
            spot_ids: Vec<i64>,
        ) -> ParkResult<HashMap<i64, Vec<Reservation>>>;

        async fn my_reservations(&self) -> ParkResult<Vec<Reservation>>;

        async fn create_reservation(
            &self,
            request: CreateReservationRequest,
        ) -> ParkResult<Reservation>;

        async fn cancel_reservation(&self, id: i64) -> ParkResult<()>;

        async fn force_cancel_reservation(&self, id: i64) -> ParkResult<()>;
    }
}
