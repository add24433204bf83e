mod test_cooldown;
mod test_quotes;
