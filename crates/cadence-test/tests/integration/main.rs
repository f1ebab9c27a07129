mod differential;
mod helpers;
mod properties;
mod scenarios;
