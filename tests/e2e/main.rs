
mod test_health;
