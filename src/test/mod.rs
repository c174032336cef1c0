pub(crate) mod compoundcurve;
