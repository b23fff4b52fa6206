/// Generates an instrumented client method that sends a request variant and
/// awaits the oneshot reply. Channel failures become
/// `UserError::ActorCommunication`.
macro_rules! client_method {
    ($client:ty => fn $method:ident($($param:ident: $param_type:ty),*) -> $return_type:ty as $request:ident::$variant:ident) => {
        impl $client {
            #[tracing::instrument(skip(self))]
            pub async fn $method(&self, $($param: $param_type),*) -> Result<$return_type, crate::store::UserError> {
                tracing::debug!("Sending request");
                let (respond_to, response) = tokio::sync::oneshot::channel();
                self.sender
                    .send($request::$variant {
                        $($param,)*
                        respond_to,
                    })
                    .await
                    .map_err(|_| crate::store::UserError::ActorCommunication("Actor closed".to_string()))?;

                response
                    .await
                    .map_err(|_| crate::store::UserError::ActorCommunication("Actor dropped".to_string()))?
            }
        }
    };
}
