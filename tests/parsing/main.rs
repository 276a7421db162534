mod errors;
mod parser;
mod reader;
mod samples;
