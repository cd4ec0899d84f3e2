#[cfg(test)]
mod debug_listener;
#[cfg(test)]
mod graphql;
#[cfg(test)]
mod span_attributes;
