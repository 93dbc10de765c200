/// Video analysis listing (mocked pipeline output)
pub mod analysis;

/// Fine ledger - in-memory fine records and their mutation operations
pub mod ledger;
