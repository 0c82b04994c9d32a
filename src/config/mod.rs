//! Configuration module

mod site;

pub use site::NavItem;
pub use site::SidebarGroup;
pub use site::SiteConfig;
pub use site::ThemeConfig;
