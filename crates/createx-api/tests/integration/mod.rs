mod content;
mod errors;
mod simulated;
mod site;
