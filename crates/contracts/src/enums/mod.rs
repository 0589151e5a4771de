pub mod building_type;
