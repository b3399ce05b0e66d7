pub mod util;

#[cfg(test)]
mod separate;
#[cfg(test)]
mod primitives;
#[cfg(test)]
mod regression;
