mod normalize;
mod rank;
mod report;
