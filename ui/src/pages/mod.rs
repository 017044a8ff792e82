pub mod not_found;
pub mod reservation_list_page;

pub use not_found::NotFoundPage;
pub use reservation_list_page::ReservationListPage;
