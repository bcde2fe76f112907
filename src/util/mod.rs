pub mod edge_indexer;
