mod asset;
mod ids;
mod performance;
mod results;
mod returns;
mod store_event;

pub use asset::{Asset, DEFAULT_HORIZON_YEARS, MAX_CALENDAR_YEAR};
pub use ids::AssetId;
pub use performance::{ActualPerformance, DividendPayment, YearlyPerformance};
pub use results::SimulationResult;
pub use returns::{
    CapitalGainModel, CompoundingFrequency, FLAT_CAPITAL_GAINS_TAX_RATE, IncomeGainModel,
    PaymentFrequency, ReturnModel,
};
pub use store_event::StoreEvent;
