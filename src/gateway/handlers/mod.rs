//! HTTP handlers, one file per endpoint group

pub mod check;
pub mod helpers;
pub mod info;
pub mod order;
pub mod services;
pub mod stats;
pub mod track;

pub use check::{CheckResponse, check_username};
pub use info::{ApiInfo, EndpointDirectory, api_info};
pub use order::{OrderResponse, create_order};
pub use services::{ServicesResponse, list_services};
pub use stats::{StatsResponse, get_stats};
pub use track::{TrackResponse, track_order};
