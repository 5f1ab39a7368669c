pub mod cli;
pub mod ctx;
pub mod io;
pub mod math;
pub mod pipeline;
pub mod reference;
pub mod schema;
pub mod scores;
