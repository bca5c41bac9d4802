pub use super::booking::Entity as Booking;
pub use super::car::Entity as Car;
pub use super::driver::Entity as Driver;
pub use super::otp::Entity as Otp;
pub use super::user::Entity as User;
