pub mod p100_call_register;
