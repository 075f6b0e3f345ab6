pub mod arinc429;
