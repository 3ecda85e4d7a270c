pub mod greedy_farthest_landmarks;
pub mod landmark_metric;
pub mod landmark_provider;
pub mod random_landmarks;
