//! Built-in services registered at startup.

pub mod arith;
pub mod echo;

pub use arith::{ArithAdd, ArithDivide};
pub use echo::EchoSay;

use crate::dispatch::MethodRegistry;
use crate::error::Result;

pub fn register_builtin(registry: &mut MethodRegistry) -> Result<()> {
    registry.register("Echo.Say", EchoSay)?;
    registry.register("Arith.Add", ArithAdd)?;
    registry.register("Arith.Divide", ArithDivide)?;
    Ok(())
}
