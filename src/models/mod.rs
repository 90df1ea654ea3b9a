mod activity_log;
mod blacklist;
mod booking;
mod guest;
mod preference;
mod room;
mod staff;

pub use activity_log::{ActivityLog, NewActivityLog};
pub use blacklist::{BlacklistEntry, NewBlacklistEntry};
pub use booking::{Booking, NewBooking, StayPeriod, conflicts_excluding};
pub use guest::{Guest, NewGuest, UpdateGuest};
pub use preference::RoomPreference;
pub use room::{Room, RoomStatus};
pub use staff::{Employee, NewEmployee};
