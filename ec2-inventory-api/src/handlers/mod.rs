// Handlers module - request handling entry points
pub mod instances;
