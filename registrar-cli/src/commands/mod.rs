pub mod details;
pub mod overviews;

pub use details::run_details;
pub use overviews::run_overviews;
