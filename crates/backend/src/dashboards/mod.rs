pub mod d400_balanced_scorecard;
