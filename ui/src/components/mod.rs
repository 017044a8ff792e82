pub mod data_table;
pub mod input;
pub mod pagination;
pub mod reservation_drawer;
pub mod reservation_list;
pub mod search_input;
pub mod select;

pub use data_table::{Column, DataTable, TableRow};
pub use input::Input;
pub use pagination::Pagination;
pub use reservation_drawer::ReservationDrawer;
pub use reservation_list::ReservationList;
pub use search_input::SearchInput;
pub use select::{Select, SelectItem};
