mod dashboard_handle;
mod module_handle;
mod reservation_handle;
mod room_handle;

pub use dashboard_handle::*;
pub use module_handle::*;
pub use reservation_handle::*;
pub use room_handle::*;
