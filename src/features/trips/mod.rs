/// 出張機能モジュール
pub mod models;
pub mod service;

pub use models::{TravelType, Trip, TripDraft};
pub use service::TripSync;
