mod expiry;
mod standard;
mod tamper;
