/// Stands in for one method of a mocked trait: records the arguments of every call and hands
/// back a preset return value. Async trait methods don't play well with the usual mocking
/// crates, so mocks are built out of these instead.
///
/// * [Args] is what gets captured on each call (use a tuple for several arguments)
/// * [Ret] is the method's return type
///
/// ```ignore
/// struct MockGreeter {
///     greet_result: FakeImplementation<String, Result<String, GreetError>>,
/// }
///
/// impl Greeter for Mutex<MockGreeter> {
///     async fn greet(&self, name: &str) -> Result<String, GreetError> {
///         let mut locked_self = self.lock().unwrap();
///         locked_self.greet_result.save_arguments(name.to_owned());
///
///         locked_self.greet_result.return_value_result()
///     }
/// }
/// ```
pub struct FakeImplementation<Args, Ret> {
    saved_arguments: Vec<Args>,
    return_value: Option<Ret>,
}

impl<Args, Ret> FakeImplementation<Args, Ret> {
    pub fn new() -> FakeImplementation<Args, Ret> {
        FakeImplementation {
            saved_arguments: Vec::new(),
            return_value: None,
        }
    }

    /// Saves arguments from a single invocation
    pub fn save_arguments(&mut self, arguments: Args) {
        self.saved_arguments.push(arguments)
    }

    /// Arguments of every invocation so far, oldest first
    pub fn calls(&self) -> &[Args] {
        self.saved_arguments.as_slice()
    }
}

impl<Args, Success, Fail> FakeImplementation<Args, Result<Success, Fail>>
where
    Success: Clone,
    Fail: Clone,
{
    /// Sets the result handed back on every invocation
    pub fn set_returned_result(&mut self, return_value: Result<Success, Fail>) {
        self.return_value = Some(return_value)
    }

    /// Clones out the configured result. Panics if none was set, which fails the test.
    pub fn return_value_result(&self) -> Result<Success, Fail> {
        match self.return_value {
            Some(ref result) => result.clone(),
            None => panic!("Tried to return from a function where the return value wasn't set!"),
        }
    }
}
