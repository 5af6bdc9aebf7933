pub mod portfolio;

pub use portfolio::{
    portfolio_analytics, AllocationSlice, AssetType, Holding, PerformerEntry, PortfolioAnalytics,
};
