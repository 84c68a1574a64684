pub mod live;
pub mod report;
pub mod services;

pub use live::{seconds_to_duration, LiveDashboard, RefreshSchedule};
pub use report::{CategoryReport, Figures, LineReport, PortfolioReport};
pub use services::SummaryService;
