pub trait Point {
    fn latitude(&self) -> f64;
    fn longitude(&self) -> f64;
    fn elevation(&self) -> Option<f64>;
}
