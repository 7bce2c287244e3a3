pub mod fakes;
pub mod row_factory;
pub mod tables_factory;
pub mod update_factory;

pub use fakes::{FailingTable, RecordingFanout};
pub use row_factory::RowFactory;
pub use tables_factory::TablesFactory;
pub use update_factory::{EmergencyUpdateFactory, MovementUpdateFactory, NotificationFactory};
