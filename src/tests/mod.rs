#![cfg(test)]

mod prop_tests;
