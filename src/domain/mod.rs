//! Business logic for the todo service. Adapters in [crate::api] call into it through driving
//! ports, and it reaches storage through driven ports implemented in [crate::persistence].

pub mod todo;

#[cfg(test)]
mod test_util;
