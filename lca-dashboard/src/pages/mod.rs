//! Dashboard pages. Each one fetches from the backend API on a user action
//! and renders through `lca_data`.

mod availability;
mod generation;
mod impact;
mod region_dates;

pub use availability::AvailabilityPage;
pub use generation::GenerationPage;
pub use impact::ImpactPage;
pub use region_dates::RegionDates;
