pub mod test_util;

#[cfg(test)]
mod test_graph;
#[cfg(test)]
mod test_selection;
