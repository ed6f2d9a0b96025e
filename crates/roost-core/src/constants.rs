/// Route component constants shared across crates
pub const API_ROUTE_COMPONENT: &str = "api";
pub const API_ROUTE_PREFIX: &str = const_str::concat!("/", API_ROUTE_COMPONENT);

pub const AUTH_ROUTE_COMPONENT: &str = "auth";
pub const AUTH_ROUTE_PREFIX: &str = const_str::concat!(API_ROUTE_PREFIX, "/", AUTH_ROUTE_COMPONENT);

pub const PROPERTIES_ROUTE_COMPONENT: &str = "properties";
pub const PROPERTIES_ROUTE_PREFIX: &str =
    const_str::concat!(API_ROUTE_PREFIX, "/", PROPERTIES_ROUTE_COMPONENT);

pub const BOOKINGS_ROUTE_COMPONENT: &str = "bookings";
pub const BOOKINGS_ROUTE_PREFIX: &str =
    const_str::concat!(API_ROUTE_PREFIX, "/", BOOKINGS_ROUTE_COMPONENT);
