/// A configuration value, together with a name and bounds on the value.
#[derive(Clone, Debug)]
pub struct ConfigOption<T> {
    pub name: &'static str,
    pub min: T,
    pub max: T,
    pub value: T,
}

impl<T: Clone> ConfigOption<T> {
    pub fn min_max(&self) -> (T, T) {
        (self.min.clone(), self.max.clone())
    }
}

impl<T: Clone + PartialOrd + std::fmt::Debug> ConfigOption<T> {
    /// Sets the value of the option, if the value is within bounds.
    ///
    /// Otherwise, the option is unchanged and returned as an error.
    pub fn set(&mut self, value: T) -> Result<(), &Self> {
        match self.min <= value && value <= self.max {
            true => {
                log::info!("{} set to {value:?}", self.name);
                self.value = value;
                Ok(())
            }
            false => Err(self),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounded_set() {
        let mut option = ConfigOption {
            name: "decay",
            min: 0.5,
            max: 1.0,
            value: 0.95,
        };

        assert!(option.set(0.8).is_ok());
        assert_eq!(option.value, 0.8);

        assert!(option.set(1.5).is_err());
        assert_eq!(option.value, 0.8);
    }
}
