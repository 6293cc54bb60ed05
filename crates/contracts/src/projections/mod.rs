pub mod p900_production;
