pub mod asset_routes;
pub mod feedback_routes;
