mod non_manifold_edges;
mod not_atan2_order;
mod split_attributes;
