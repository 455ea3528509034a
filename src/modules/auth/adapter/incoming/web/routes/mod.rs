mod current_admin;
mod login_admin;

pub use current_admin::current_admin_handler;
pub use login_admin::login_admin_handler;
