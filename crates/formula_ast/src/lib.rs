pub mod display;
pub mod error;
pub mod node;
pub mod operator;
pub mod rational;
pub mod value;

pub use error::{ArithmeticError, ArityError};
pub use node::Node;
pub use operator::Operator;
pub use rational::Rational;
pub use value::Value;
