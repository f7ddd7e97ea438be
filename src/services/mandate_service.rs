use uuid::Uuid;

use crate::config::Config;
use crate::planner::{MandatePatch, Portfolio};

pub struct MandateService;

impl MandateService {
    /// Toggle the mandate on a debt or bill, creating it with the configured
    /// default provider and limit when absent.
    pub fn toggle(portfolio: &Portfolio, id: Uuid, config: &Config) -> Portfolio {
        portfolio.with_mandate_toggled(id, &config.default_provider, config.default_monthly_limit)
    }

    pub fn edit(portfolio: &Portfolio, id: Uuid, patch: &MandatePatch) -> Portfolio {
        portfolio.with_mandate_edited(id, patch)
    }

    pub fn revoke(portfolio: &Portfolio, id: Uuid) -> Portfolio {
        portfolio.with_mandate_revoked(id)
    }
}
