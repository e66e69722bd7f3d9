pub mod account;
pub mod health;
pub mod inventory;
pub mod quest;
pub mod star;

#[cfg(test)]
mod test;
