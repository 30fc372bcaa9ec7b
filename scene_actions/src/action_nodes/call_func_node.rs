use crate::InstantAction;

/// Callback invoked by [`CallFunc`].
///
/// Receives the context object, the node the action runs on and the payload.
pub type Callback<N, C, D> = Box<dyn FnMut(Option<&C>, &mut N, Option<&D>)>;

/// Calls a callback when started.
///
/// The context object (`C`) and the payload (`D`) are both optional. Without
/// a callback the action does nothing.
pub struct CallFunc<N, C = (), D = ()> {
    selector_target: Option<C>,
    callback: Option<Callback<N, C, D>>,
    data: Option<D>,
}

impl<N, C, D> CallFunc<N, C, D> {
    pub fn new(
        selector_target: Option<C>,
        callback: Option<Callback<N, C, D>>,
        data: Option<D>,
    ) -> Self {
        Self {
            selector_target,
            callback,
            data,
        }
    }

    pub fn with_callback<F>(callback: F) -> Self
    where
        F: FnMut(Option<&C>, &mut N, Option<&D>) + 'static,
    {
        Self::new(None, Some(Box::new(callback)), None)
    }

    pub fn with_target_callback(mut self, selector_target: C) -> Self {
        self.selector_target = Some(selector_target);
        self
    }

    pub fn with_data(mut self, data: D) -> Self {
        self.data = Some(data);
        self
    }

    /// Invokes the callback with the context object, `target` and the payload.
    pub fn execute(&mut self, target: &mut N) {
        if let Some(callback) = self.callback.as_mut() {
            callback(self.selector_target.as_ref(), target, self.data.as_ref());
        }
    }

    pub fn target_callback(&self) -> Option<&C> {
        self.selector_target.as_ref()
    }

    /// Replaces the context object used by later calls to `execute`.
    pub fn set_target_callback(&mut self, selector_target: Option<C>) {
        self.selector_target = selector_target;
    }

    pub fn data(&self) -> Option<&D> {
        self.data.as_ref()
    }

    pub fn has_callback(&self) -> bool {
        self.callback.is_some()
    }
}

impl<N, C, D> Default for CallFunc<N, C, D> {
    fn default() -> Self {
        Self::new(None, None, None)
    }
}

impl<N, C, D> InstantAction<N> for CallFunc<N, C, D> {
    fn start_with_target(&mut self, target: &mut N) {
        self.execute(target);
    }

    fn name(&self) -> &'static str {
        "CallFunc"
    }
}
