//! HTTP adapters which translate requests into calls on the domain's driving ports

pub mod health;
pub mod swagger_main;
pub mod todo;

#[cfg(test)]
mod test_util;
