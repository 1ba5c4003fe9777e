/// UI widgets for Segmeter.

pub mod segmented_bar;
