pub mod d400_cost_overview;
