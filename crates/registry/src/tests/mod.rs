//! End-to-end scenarios: declare, alias, load.
