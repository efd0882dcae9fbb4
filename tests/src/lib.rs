#[cfg(test)]
mod address_ranges;
#[cfg(test)]
mod fixtures;
