#[cfg(test)]
mod common;



#[cfg(test)]
mod rules_tests;

#[cfg(test)]
mod status_tests;
