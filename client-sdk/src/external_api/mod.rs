pub mod contract;
pub mod l1_client;
pub mod l2_client;
